use rand::{distributions::Uniform, thread_rng, Rng};
use wordtally::trie::{Classification, Trie};

fn main() {
    static DICTIONARY_SIZE: usize = 20;
    static DATA_SIZE: usize = 200;
    static SIZE: usize = 5;

    let letters = Uniform::new_inclusive(b'a', b'c');
    let word = || -> String {
        let len = thread_rng().gen_range(1..=SIZE);
        thread_rng()
            .sample_iter(&letters)
            .take(len)
            .map(char::from)
            .collect()
    };

    // Build a small dictionary from a narrow alphabet so that
    // random data words frequently land on it.
    let mut trie = Trie::new();
    for _i in 0..DICTIONARY_SIZE {
        trie.insert(word());
    }
    println!(
        "dictionary: {} entries, {} nodes",
        trie.count(),
        trie.node_count()
    );

    let mut unmatched = 0;
    for _i in 0..DATA_SIZE {
        if trie.process(word()) == Classification::Unmatched {
            unmatched += 1;
        }
    }
    println!("scanned {DATA_SIZE} words, {unmatched} unmatched");

    for entry in trie.iter() {
        println!("{entry}");
    }
}
