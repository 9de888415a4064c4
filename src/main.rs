use kvcore::Store;

fn main() {
    tracing_subscriber::fmt().init();

    let store = Store::open("kvstore.data", "kvstore.log").expect("Failed to open store");

    store.begin().unwrap();
    store.put("foo", "Hello, World!").unwrap();
    store.put("bar", "C programming is fun.").unwrap();
    store.commit().unwrap();

    print_value(&store, "foo");
    print_value(&store, "bar");

    store.begin().unwrap();
    store.delete("foo").unwrap();
    store.rollback().unwrap();

    // Rollback is marker-only: the delete above stays in effect.
    print_value(&store, "foo");

    store.close().unwrap();
}

fn print_value(store: &Store, key: &str) {
    match store.get(key) {
        Some(value) => println!("GET {}: {}", key, String::from_utf8_lossy(value.as_bytes())),
        None => println!("GET {}: <not found>", key),
    }
}
