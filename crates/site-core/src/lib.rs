pub mod ambient;
pub mod carousel;
pub mod constants;
pub mod cursor;
pub mod i18n;
pub mod particles;
pub mod showcase;

pub use ambient::*;
pub use carousel::*;
pub use constants::*;
pub use cursor::*;
pub use i18n::*;
pub use particles::*;
pub use showcase::*;
