pub mod hooks;
pub mod input;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;

use crate::pages::frontend_2048_game::Frontend2048Game;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <Frontend2048Game />
        </div>
    }
}
