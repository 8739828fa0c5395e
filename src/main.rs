use sllist::LinkedList;
use tracing_subscriber::{prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() {
    init_logging();

    let mut list = LinkedList::from_values(vec![1, 2, 3, 4, 5]);
    list.print();
    list.push(6);
    list.print();
    match list.pop() {
        Some(v) => println!("the tail {}", v),
        None => tracing::warn!("nothing to pop"),
    }
    list.print();
    tracing::info!(len = list.len(), "done");
}
