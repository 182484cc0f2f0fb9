mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod posts;
pub use posts::Posts;

mod profile;
pub use profile::Profile;
