use merge128_web::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    Renderer::<App>::new().render();
}
