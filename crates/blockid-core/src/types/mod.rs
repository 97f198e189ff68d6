mod bands;
mod request;
mod trust;

pub use bands::*;
pub use request::*;
pub use trust::*;
