pub mod capability;
pub mod color;
pub mod constants;
pub mod corridor;
pub mod error;
pub mod gradient;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod state;
pub mod trail;

pub use capability::*;
pub use color::*;
pub use constants::*;
pub use corridor::*;
pub use error::EngineError;
pub use gradient::*;
pub use parallax::*;
pub use particles::*;
pub use reveal::*;
pub use state::*;
pub use trail::*;
