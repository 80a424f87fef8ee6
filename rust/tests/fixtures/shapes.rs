use std::f64::consts::PI;

pub enum Shape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

pub trait Area {
    fn area(&self) -> f64;
}

impl Area for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rect { width, height } => width * height,
        }
    }
}

pub type Meters = f64;

pub struct Scale {
    pub factor: f64,
}

// Constructor named after the type it builds.
#[allow(non_snake_case)]
pub fn Scale(factor: f64) -> Scale {
    Scale { factor }
}
