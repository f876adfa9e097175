pub mod camera;
pub mod constants;
pub mod contact;
pub mod content;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod sections;

pub use camera::*;
pub use constants::*;
pub use contact::*;
pub use particles::*;
pub use reveal::*;
pub use scroll::*;
pub use sections::*;
