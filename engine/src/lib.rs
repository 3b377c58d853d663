pub mod math;

pub mod transform2d;
pub use transform2d::Transform2D;

pub mod object2d;
pub use object2d::Object2D;

pub mod shape;
pub use shape::{Shape, TransformOp};

pub mod geometry2d;

pub mod input;
pub use input::{Input, Key};

pub mod canvas;
pub use canvas::Canvas;
