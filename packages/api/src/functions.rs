//! Catalogue of backend functions the client calls.

pub mod users {
    use serde::Serialize;

    use crate::function::{FunctionReference, NoArgs};
    use crate::models::User;

    /// The signed-in player, `None` when signed out.
    pub const VIEWER: FunctionReference<NoArgs, Option<User>> =
        FunctionReference::query("users:viewer");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SelectAvatarArgs {
        pub avatar_id: String,
    }

    /// Pick one of the player's avatar choices as their image.
    pub const SELECT_AVATAR: FunctionReference<SelectAvatarArgs, ()> =
        FunctionReference::mutation("users:selectAvatar");
}
