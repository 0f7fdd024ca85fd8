/// Value supplied for the free variable `x` during evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    x: Option<f64>,
}

impl Binding {
    pub fn x(value: f64) -> Self {
        Self { x: Some(value) }
    }

    pub fn unbound() -> Self {
        Self { x: None }
    }

    pub fn value(&self) -> Option<f64> {
        self.x
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Binding::x(value)
    }
}

impl From<Option<f64>> for Binding {
    fn from(x: Option<f64>) -> Self {
        Self { x }
    }
}
