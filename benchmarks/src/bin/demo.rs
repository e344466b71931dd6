use pairseq::PairedSequence;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut l = PairedSequence::<i32, String>::new();
    l.append((1, String::from("foo")));
    l.append((2, String::from("bar")));

    log::info!("{} pairs: {:?}", l.len(), l);
    for i in 0..=l.len() {
        match l.get(i) {
            Ok(pair) => log::info!("pair {}: {:?}", i, pair.into_inner()),
            Err(e) => log::info!("pair {}: {}", i, e),
        }
    }
}
