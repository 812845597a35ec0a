#[rocket::launch]
fn rocket() -> _ {
    web_app::server()
}
