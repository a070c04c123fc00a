use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use shared::constants::TARGET_TILE;
use shared::shared_2048_game::{reached_target, Command, SaveState};
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_game_session;
use crate::input::{direction_for_code, direction_for_key};
use crate::styles;

#[function_component(Frontend2048Game)]
pub fn frontend_2048_game() -> Html {
    let game = use_game_session();

    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                let options = EventListenerOptions {
                    passive: false,
                    phase: EventListenerPhase::Bubble,
                };
                EventListener::new_with_options(&document, "keydown", options, move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.repeat() {
                        return;
                    }
                    let direction =
                        direction_for_key(&event.key()).or_else(|| direction_for_code(&event.code()));
                    let Some(direction) = direction else {
                        return;
                    };
                    event.prevent_default();
                    game.dispatch(Command::Move(direction));
                })
            });
            move || drop(listener)
        });
    }

    let on_new_game = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("New game requested");
            game.dispatch(Command::Reset);
        })
    };

    let state = game.snapshot();

    html! {
        <div class={styles::CARD}>
            <h1 class={styles::TEXT_H1}>{ TARGET_TILE.to_string() }</h1>
            <p class={classes!("mb-4", styles::TEXT_BODY)}>
                { format!("Use arrow keys, WASD, IJKL, or numpad 8426. Merge tiles until one reaches {}.", TARGET_TILE) }
            </p>
            <div class="flex justify-center mb-6">
                <button onclick={on_new_game} class={styles::BUTTON_PRIMARY}>{ "New Game" }</button>
            </div>
            <div class={styles::BOARD_GRID}>
                { for state.board.tiles().map(|value| html! {
                    <div class={classes!(styles::TILE_BASE, styles::tile_class(value))}>
                        { styles::tile_label(value) }
                    </div>
                }) }
            </div>
            <p class={styles::TEXT_SCORE}>{ format!("Score: {}", state.score) }</p>
            { game_over_banner(&state) }
        </div>
    }
}

fn game_over_banner(state: &SaveState) -> Html {
    if !state.game_over {
        return html! {};
    }
    let message = if reached_target(&state.board) {
        format!("You reached {}!", TARGET_TILE)
    } else {
        "No moves left.".to_string()
    };
    html! {
        <div class="mt-2 text-center">
            <p class="text-red-500 font-bold">{ "Game Over!" }</p>
            <p class={styles::TEXT_BODY}>{ message }</p>
        </div>
    }
}
