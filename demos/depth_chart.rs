use anyhow::Context;
use depthchart::{seed, Config, DepthChartStore, Player, PlayerId, Rank};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading {}", path))?,
        None => Config::default(),
    };
    let mut rng = config.rng()?;

    let mut store = DepthChartStore::new();
    seed::populate(&mut store, &config, &mut rng);
    for chart in store.get_full_depth_chart(None).iter() {
        println!("{}\n", chart);
    }

    let Some(sport) = config.sports.first() else {
        return Ok(());
    };
    let Some(position) = sport.positions.first() else {
        return Ok(());
    };

    let rookie = Player::new(PlayerId::new(), "Ryan Rookie").with_tag(sport, position.as_str());
    let rookie_id = rookie.id.clone();
    store.add_player(sport, position, rookie, Some(0));
    println!("{} {} after signing a rookie:", sport.name, position);
    for (spot, player) in store.players(sport, position).iter().enumerate() {
        println!("  {:<8} {}", Rank(spot).to_string(), player.name);
    }

    let below = store.get_players_below(sport, position, &rookie_id);
    println!(
        "behind the rookie: {}",
        below
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if let Some(backup) = below.first() {
        println!("\n{}\n", backup.stats_card());
        store.remove_player(sport, position, &backup.id);
        println!("released {}", backup.name);
    }

    for chart in store.get_full_depth_chart(Some(sport)).iter() {
        println!("\n{}", chart);
    }
    Ok(())
}
