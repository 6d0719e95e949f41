use rsky_migrate::components::App;

fn main() {
    dioxus::launch(App);
}
