mod home;
mod login;
mod memories;
mod travels;
mod upload;

pub use home::HomePage;
pub use login::LoginPage;
pub use memories::MemoriesPage;
pub use travels::{MapMarker, TravelsPage};
pub use upload::UploadPage;
