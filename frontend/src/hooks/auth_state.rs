use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::stored_token;
use crate::Route;

fn has_valid_token() -> bool {
    stored_token().is_some()
}

/// Sends signed-out visitors to the login page, and keeps checking while the
/// page stays mounted in case the token is dropped by another request.
#[hook]
pub fn use_auth_check() {
    let navigator = use_navigator().expect("Navigator not available");

    let check_auth = {
        let navigator = navigator.clone();
        move || {
            if !has_valid_token() {
                navigator.push(&Route::Login);
            }
        }
    };

    {
        let check_auth = check_auth.clone();
        use_effect_with((), move |_| {
            check_auth();
            let interval = gloo_timers::callback::Interval::new(30_000, move || {
                check_auth();
            });
            move || drop(interval)
        });
    }
}
