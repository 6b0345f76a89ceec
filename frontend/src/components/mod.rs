pub mod common_toast;
pub mod nav;
pub mod widgets;
