use swimlane_core::{build, Config, Lane, Step};

fn main() {
    let lanes = vec![
        Lane::new("client", "Client", 0.2),
        Lane::new("server", "Server", 0.8),
    ];
    let steps = vec![
        Step::arrow("client", "server", "GET /resource"),
        Step::annotation("server", "Check cache"),
        Step::arrow("server", "client", "200 OK"),
    ];
    let canvas = build(Config::default(), &lanes, &steps).expect("Failed to build diagram");
    println!("{}", canvas.to_svg());
}
