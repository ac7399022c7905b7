pub use super::favorites::Entity as Favorites;
pub use super::people::Entity as People;
pub use super::planets::Entity as Planets;
pub use super::user::Entity as User;
