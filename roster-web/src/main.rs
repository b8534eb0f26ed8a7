fn main() {
    dioxus::launch(roster_web::App);
}
