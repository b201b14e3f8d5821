fn main() {
    dioxus::launch(mockup_web::App);
}
