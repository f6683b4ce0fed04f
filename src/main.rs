use montecarlo::{Analyzer, Die, Game, TableForm};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> montecarlo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut loaded = Die::parse("d6")?;
    loaded.set_weight(&6, 5.0)?;

    let mut game = Game::new(vec![Die::parse("d6")?, loaded])?;
    game.play(10)?;
    println!("{}", game.show(TableForm::Wide)?);

    let analyzer = Analyzer::new(&game)?;
    info!(jackpots = analyzer.jackpot(), "analysed play");
    for combination in analyzer.combo() {
        println!("{combination}");
    }
    println!("{}", analyzer.face_counts_per_roll());

    Ok(())
}
