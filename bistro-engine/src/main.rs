use anyhow::Context;
use bistro_engine::{
    Greeting, RedbStore, Scheduler, Session, SharedStore, SystemClock, print_banner,
    setup_environment,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, work dir, logging
    let config = setup_environment()?;
    print_banner();

    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Smart Bistro engine starting"
    );

    // 2. durable store
    let db_path = config.db_path();
    let store: SharedStore = Arc::new(
        RedbStore::open(&db_path).with_context(|| format!("opening {}", db_path.display()))?,
    );

    // 3. page load
    let mut session = Session::new(store, Arc::new(SystemClock), config.timezone);
    match session.start() {
        Greeting::FirstVisit => tracing::info!("Welcome! New-user discount window is open"),
        Greeting::ReturningEligible => tracing::info!("Welcome back, discount still available"),
        Greeting::DiscountExpired => tracing::info!("Welcome back, new-user discount expired"),
    }
    if let Some(reservation) = session.current_reservation() {
        tracing::info!(
            table_id = reservation.table_id,
            date = %reservation.date,
            time = %reservation.time,
            "Existing reservation"
        );
    }

    // 4. ticks until Ctrl+C
    let handle = Scheduler::from_config(session, &config).spawn();
    let mut snapshots = handle.subscribe();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    tracing::warn!("Tick scheduler stopped unexpectedly");
                    break;
                }
                let Some(snapshot) = snapshots.borrow_and_update().clone() else {
                    continue;
                };
                tracing::info!(
                    period = ?snapshot.period,
                    notice = snapshot.notice.as_deref().unwrap_or("-"),
                    tables = ?snapshot.available_tables,
                    is_full = snapshot.is_full,
                    anti_bot = snapshot.anti_bot_active,
                    "Menu repriced"
                );
                for item in snapshot.discounted_items() {
                    tracing::info!(
                        id = %item.id,
                        name = %item.name,
                        price = item.price,
                        original_price = ?item.original_price,
                        "Flash discount"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl+C received, shutting down");
                break;
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}
