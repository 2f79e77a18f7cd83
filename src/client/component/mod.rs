pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod toast;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use toast::ToastContainer;
