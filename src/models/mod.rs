pub mod label;
pub mod link;
pub mod response;
pub mod space;
pub mod workflow;

pub use label::*;
pub use link::*;
pub use response::*;
pub use space::*;
pub use workflow::*;
