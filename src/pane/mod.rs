mod split_pane;
pub use split_pane::{Notification, PaneId, SplitPane};

mod sync;
pub use sync::{PaneSync, Propagation};
