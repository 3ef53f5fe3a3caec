use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twenty48::policy::Greedy;
use twenty48::{Game, GameConfig, Status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut rng = rand::thread_rng();
    let mut game = Game::new(GameConfig::default(), &mut rng)?;
    println!("{}", game.grid());

    let mut move_count = 0u32;
    while let Some(direction) = Greedy.next_move(&game) {
        game.apply_move(direction, &mut rng);
        move_count += 1;
        println!("{}", game.grid());
        if game.is_won() {
            break;
        }
    }

    let verdict = match game.status() {
        Status::Won => "won",
        Status::Lost => "lost",
        Status::InProgress => "stopped",
    };
    println!(
        "Moves made: {}, score: {}, highest tile: {}, {}",
        move_count,
        game.score(),
        game.highest(),
        verdict
    );
    Ok(())
}
