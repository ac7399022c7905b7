//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server so signatures
//! don't need to spell out the `entity` crate paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `first_name` - Optional first name
/// - `email` - Optional, unique email used as the login username
/// - `password` - Argon2id PHC hash of the password
/// - `is_active` - Active flag, set to `true` on creation
pub type UserModel = entity::user::Model;

/// Type alias for the person database model.
pub type PersonModel = entity::people::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for the favorite database model.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `name` - Name of the target copied at creation time
/// - `user_id` - Declared foreign key to `user`, never populated
/// - `people_id` - Foreign key to the favorited person, if any
/// - `planets_id` - Foreign key to the favorited planet, if any
pub type FavoriteModel = entity::favorites::Model;
