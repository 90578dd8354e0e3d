mod app;
mod components;
mod hooks;
mod services;

fn main() {
    app::mount();
}
