use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_case_game::{
    decoy_strip, plant_outcome, CaseDefinition, InventoryItem, Item, ReelConfig, SpinPhase,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::base::Base;
use crate::components::{ItemCard, WinModal};
use crate::hooks::auth_state::use_auth_check;
use crate::session::{self, use_session, SessionAction};
use crate::styles;

static REEL: Lazy<ReelConfig> = Lazy::new(|| {
    let config = ReelConfig::default();
    if let Err(err) = config.validate() {
        // geometry constants are source-level data; refuse to animate with a
        // broken set rather than land the marker on the wrong slot
        panic!("reel configuration rejected: {err}");
    }
    config
});

#[derive(Properties, PartialEq)]
pub struct CaseOpenerProps {
    pub id: u64,
}

/// The case page: loads one case, renders its reel and drives the spin.
///
/// The strip committed to the DOM before the long transition starts already
/// carries the server's item at the target slot, so the visible landing can
/// never disagree with the real outcome.
#[function_component(CaseOpenerPage)]
pub fn case_opener_page(props: &CaseOpenerProps) -> Html {
    use_auth_check();
    let session = use_session();

    let case_data = use_state(|| None::<CaseDefinition>);
    let load_error = use_state(|| None::<String>);
    let reel = use_state(Vec::<Item>::new);
    let phase = use_state(|| SpinPhase::Idle);
    let won = use_state(|| None::<InventoryItem>);
    let spin_error = use_state(|| None::<String>);
    let offset_px = use_state(|| 0.0_f64);
    let transition_ms = use_state(|| 0_u32);
    let viewport_ref = use_node_ref();
    // Every pending phase change of the current spin lives here. Dropping a
    // timeout cancels it, so clearing the vec is both "cancel the old spin"
    // and "nothing fires after unmount".
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let mounted = use_mut_ref(|| true);
    // Synchronous twin of the phase guard: state handles only change on the
    // next render, so a double-click in the same tick would slip past the
    // phase check alone and issue a second open call.
    let in_flight = use_mut_ref(|| false);

    // 1. Load the case definition once per case id
    {
        let case_data = case_data.clone();
        let reel = reel.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            spawn_local(async move {
                match api::get_json::<CaseDefinition>(&format!("/case/{id}")).await {
                    Ok(case) => {
                        // cosmetic filler so the strip is not blank before
                        // the first spin; uniform sampling, no drop weights
                        let pool = case.item_pool();
                        if !pool.is_empty() {
                            let mut rng = SmallRng::from_entropy();
                            match decoy_strip(&pool, REEL.reel_length, &mut rng) {
                                Ok(strip) => reel.set(strip),
                                Err(err) => log::warn!("initial strip not built: {err}"),
                            }
                        }
                        case_data.set(Some(case));
                    }
                    Err(err) => load_error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    // 2. Invalidate all scheduled phase changes when the page goes away
    {
        let timers = timers.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
                timers.borrow_mut().clear();
            }
        });
    }

    // 3. The spin itself
    let handle_open = {
        let case_data = case_data.clone();
        let reel = reel.clone();
        let phase = phase.clone();
        let won = won.clone();
        let spin_error = spin_error.clone();
        let offset_px = offset_px.clone();
        let transition_ms = transition_ms.clone();
        let viewport_ref = viewport_ref.clone();
        let timers = timers.clone();
        let session = session.clone();
        let case_id = props.id;

        Callback::from(move |_: MouseEvent| {
            if *in_flight.borrow() || !phase.accepts_trigger() {
                return;
            }
            let Some(case) = (*case_data).clone() else {
                return;
            };
            let pool = case.item_pool();
            if pool.is_empty() {
                spin_error.set(Some("This case has no items to drop.".to_string()));
                return;
            }

            *in_flight.borrow_mut() = true;
            phase.set(SpinPhase::Resetting);
            won.set(None);
            spin_error.set(None);
            // rewind instantly so the fresh strip starts from rest instead
            // of jump-cutting from the previous landing position
            transition_ms.set(0);
            offset_px.set(0.0);

            let reel = reel.clone();
            let phase = phase.clone();
            let won = won.clone();
            let spin_error = spin_error.clone();
            let offset_px = offset_px.clone();
            let transition_ms = transition_ms.clone();
            let viewport_ref = viewport_ref.clone();
            let timers = timers.clone();
            let session = session.clone();
            let mounted = mounted.clone();
            let in_flight = in_flight.clone();

            spawn_local(async move {
                let mut rng = SmallRng::from_entropy();
                let mut strip = match decoy_strip(&pool, REEL.reel_length, &mut rng) {
                    Ok(strip) => strip,
                    Err(err) => {
                        *in_flight.borrow_mut() = false;
                        phase.set(SpinPhase::Idle);
                        spin_error.set(Some(err.to_string()));
                        return;
                    }
                };

                // The one authoritative call. The debit and the grant happen
                // server-side here; everything after this line only presents
                // a fact that already exists.
                let result = api::post_json::<_, InventoryItem>(
                    &format!("/case/{case_id}/open"),
                    &serde_json::json!({}),
                )
                .await;

                if !*mounted.borrow() {
                    // the page is gone; the server already settled the spin,
                    // so the result is simply not presented
                    return;
                }

                let outcome = match result {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        *in_flight.borrow_mut() = false;
                        phase.set(SpinPhase::Idle);
                        if err == ApiError::Unauthorized {
                            session.dispatch(SessionAction::SignedOut);
                        }
                        spin_error.set(Some(err.to_string()));
                        return;
                    }
                };

                if let Err(err) = plant_outcome(&mut strip, REEL.target_index, &outcome.item) {
                    *in_flight.borrow_mut() = false;
                    phase.set(SpinPhase::Idle);
                    spin_error.set(Some(err.to_string()));
                    return;
                }
                reel.set(strip);

                let viewport_px = viewport_ref
                    .cast::<web_sys::Element>()
                    .map(|el| el.client_width() as f64)
                    .unwrap_or(0.0);
                let target_px =
                    REEL.target_offset_px(viewport_px, REEL.sample_jitter_px(&mut rng));
                let schedule = REEL.schedule();

                let mut pending = timers.borrow_mut();
                pending.clear();
                {
                    let phase = phase.clone();
                    let offset_px = offset_px.clone();
                    let transition_ms = transition_ms.clone();
                    // short beat so the zero-duration rewind has committed
                    // before the long transition replaces it
                    pending.push(Timeout::new(schedule.transition_start_ms, move || {
                        transition_ms.set(REEL.spin_duration_ms);
                        offset_px.set(target_px);
                        phase.set(SpinPhase::Spinning);
                    }));
                }
                {
                    let phase = phase.clone();
                    let session = session.clone();
                    let in_flight = in_flight.clone();
                    pending.push(Timeout::new(schedule.landed_ms, move || {
                        // the trigger re-arms here; the reveal still follows
                        *in_flight.borrow_mut() = false;
                        phase.set(SpinPhase::Landed);
                        // the debit already happened server-side; pull the
                        // new balance into the navbar
                        spawn_local(async move {
                            session::refresh_user(&session).await;
                        });
                    }));
                }
                {
                    let won = won.clone();
                    pending.push(Timeout::new(schedule.reveal_ms, move || {
                        won.set(Some(outcome));
                    }));
                }
            });
        })
    };

    let handle_close_modal = {
        let won = won.clone();
        Callback::from(move |_| won.set(None))
    };

    if let Some(err) = &*load_error {
        return html! {
            <Base>
                <div class={styles::CONTAINER}>
                    <div class={styles::ALERT_ERROR}>{err}</div>
                </div>
            </Base>
        };
    }
    let Some(case) = &*case_data else {
        return html! {
            <Base>
                <div class="flex-grow flex items-center justify-center min-h-[50vh]">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            </Base>
        };
    };

    let spinning = !phase.accepts_trigger();
    let strip_style = format!(
        "transform: translateX({}px); transition: transform {}ms cubic-bezier(0.1, 0.6, 0.1, 1);",
        *offset_px, *transition_ms
    );

    html! {
        <Base>
            <div class="w-full p-4 flex flex-col items-center">
                <h2 class="text-3xl font-bold text-center mb-4">{&case.name}</h2>

                <div ref={viewport_ref} class="relative w-full overflow-hidden h-[150px]">
                    // central marker the target slot lands under
                    <div
                        class="absolute top-0 w-1 h-full bg-yellow-400 z-10"
                        style="left: calc(50% - 2px)"
                    ></div>
                    // gap-2 is 8px and must stay equal to the configured slot gap
                    <div class="flex gap-2 absolute top-0 left-0" style={strip_style}>
                        { for reel.iter().enumerate().map(|(index, item)| html! {
                            <ItemCard key={index} item={item.clone()} width_px={REEL.slot_width_px} />
                        }) }
                    </div>
                </div>

                if let Some(err) = &*spin_error {
                    <p class={styles::TEXT_ERROR}>{err}</p>
                }

                <div class="text-center mt-6">
                    <button
                        onclick={handle_open}
                        disabled={spinning || case.case_items.is_empty()}
                        class={styles::BUTTON_PRIMARY}
                    >
                        { if spinning {
                            "Opening...".to_string()
                        } else {
                            format!("Open ({:.2} €)", case.price)
                        }}
                    </button>
                </div>
            </div>

            if let Some(outcome) = &*won {
                <WinModal outcome={outcome.clone()} on_close={handle_close_modal} />
            }
        </Base>
    }
}
