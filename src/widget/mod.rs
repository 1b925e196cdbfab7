mod spinner;
mod vsplit;

pub use spinner::Spinner;
pub use vsplit::VSplit;
