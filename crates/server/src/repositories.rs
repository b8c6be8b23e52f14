mod genre;
mod session;
mod user;

pub use genre::GenreRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
