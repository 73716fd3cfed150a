pub mod compatibility;
pub mod fortune;
pub mod stick;
pub mod texts;
pub mod zodiac;

pub use compatibility::*;
pub use fortune::*;
pub use stick::*;
pub use texts::*;
pub use zodiac::*;
