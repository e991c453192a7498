use api::functions::users;
use api::User;
use dioxus::prelude::*;

use crate::{use_backend, use_query};

/// Avatar and name of the signed-in player.
#[component]
pub fn PlayerBadge() -> Element {
    let viewer = use_query(users::VIEWER, || None);

    let content = match &*viewer.read() {
        None => rsx! { span { class: "player-badge-loading", "…" } },
        Some(Ok(Some(user))) => rsx! { PlayerCard { user: user.clone() } },
        Some(Ok(None)) => rsx! { span { class: "player-badge-name", "Guest" } },
        Some(Err(e)) => rsx! { span { class: "player-badge-error", "{e}" } },
    };

    rsx! {
        div { class: "player-badge", {content} }
    }
}

#[component]
fn PlayerCard(user: User) -> Element {
    rsx! {
        if let Some(url) = user.avatar_url() {
            img { class: "player-badge-avatar", src: "{url}", alt: "Avatar" }
        }
        span { class: "player-badge-name", "{user.display_name()}" }
    }
}

/// Grid of the player's avatar choices; clicking one selects it on the backend.
#[component]
pub fn AvatarPicker() -> Element {
    let backend = use_backend();
    let mut viewer = use_query(users::VIEWER, || None);
    let mut error = use_signal(|| Option::<String>::None);

    let choices = match &*viewer.read() {
        Some(Ok(Some(user))) => user.avatar_choices.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "avatar-picker",
            for choice in choices {
                button {
                    key: "{choice.id}",
                    class: "avatar-choice",
                    onclick: {
                        let backend = backend.clone();
                        let avatar_id = choice.id.clone();
                        move |_| {
                            let backend = backend.clone();
                            let args = users::SelectAvatarArgs { avatar_id: avatar_id.clone() };
                            spawn(async move {
                                match api::mutation(&backend, users::SELECT_AVATAR, Some(&args)).await {
                                    Ok(()) => {
                                        error.set(None);
                                        viewer.restart();
                                    }
                                    Err(e) => {
                                        tracing::error!("avatar selection failed: {e}");
                                        error.set(Some(e.to_string()));
                                    }
                                }
                            });
                        }
                    },
                    img { src: "{choice.url}", alt: "Avatar choice" }
                }
            }
            if let Some(message) = error() {
                p { class: "avatar-picker-error", "{message}" }
            }
        }
    }
}
