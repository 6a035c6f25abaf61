pub mod purchase_return;
pub mod sale_return;

pub use purchase_return::*;
pub use sale_return::*;
