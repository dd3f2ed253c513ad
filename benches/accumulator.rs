use commitment_accumulator::merkle_tree::{params::DEFAULT_DEPTH, MerkleAccumulator};
use commitment_accumulator::poseidon::PoseidonHasher;
use criterion::{criterion_group, criterion_main, Criterion};
use halo2_proofs::halo2curves::bn256::Fr as Fp;

const MAX_POWER: u32 = 10;
const SAMPLE_SIZE: usize = 10;

fn build_accumulator(num_leaves: usize) -> MerkleAccumulator {
    let leaves = (0..num_leaves as u64).map(Fp::from).collect();
    MerkleAccumulator::from_leaves(DEFAULT_DEPTH, leaves, PoseidonHasher::new()).unwrap()
}

fn root_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    for i in 4..=MAX_POWER {
        let accumulator = build_accumulator(2usize.pow(i));

        let bench_name = format!("compute root for 2 power of {} leaves", i);
        criterion.bench_function(&bench_name, |b| b.iter(|| accumulator.root()));
    }
}

fn proof_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    for i in 4..=MAX_POWER {
        let accumulator = build_accumulator(2usize.pow(i));
        let root = accumulator.root();
        let last = accumulator.leaf_count() - 1;
        let leaf = accumulator.leaf(last).unwrap();

        let bench_name = format!("generate proof for 2 power of {} leaves", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| accumulator.generate_proof(last).unwrap())
        });

        let proof = accumulator.generate_proof(last).unwrap();
        let bench_name = format!("verify proof for 2 power of {} leaves", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| accumulator.verify_proof(leaf, &proof, root))
        });
    }
}

criterion_group!(benches, root_benchmark, proof_benchmark);
criterion_main!(benches);
