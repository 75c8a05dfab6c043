use std::io::Cursor;

use sapgraph::{Digraph, Outcast, Sap, WordNet};

const SYNSETS: &str = "\
0,entity,that which exists
1,organism being,a living thing
2,animal beast,a living organism
3,plant flora,a living organism lacking the power of locomotion
4,dog domestic_dog,a member of the genus Canis
5,cat true_cat,feline mammal
6,oak oak_tree,a tree of the genus Quercus
";

const HYPERNYMS: &str = "\
1,0
2,1
3,1
4,2
5,2
6,3
";

fn main() {
    if let Err(err) = run() {
        eprintln!("basic_usage error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Digraph::from_edges(4, &[(0, 2), (1, 2), (2, 3)])?;
    let sap = Sap::new(graph);
    println!(
        "length(0, 1): {:?} ancestor: {:?}",
        sap.length(0, 1)?,
        sap.ancestor(0, 1)?
    );

    let wordnet = WordNet::from_readers(Cursor::new(SYNSETS), Cursor::new(HYPERNYMS))?;
    println!("distance(dog, cat): {:?}", wordnet.distance("dog", "cat")?);
    println!("sap(dog, oak): {:?}", wordnet.sap("dog", "oak")?);

    let outcast = Outcast::new(&wordnet).outcast(&["dog", "cat", "oak"])?;
    println!("outcast: {outcast}");
    println!("cache stats: {:?}", wordnet.sap_engine().cache_stats());
    Ok(())
}
