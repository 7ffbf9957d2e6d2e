use std::ops::Deref;

use tracing::debug;

use super::galois::G;
use crate::common::metadata::{ECLevel, Version};

// Error correction
//------------------------------------------------------------------------------

// Splits data codewords into blocks, computes their ecc and returns the final
// interleaved codeword sequence
pub fn add_ecc(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<u8> {
    let (data_blocks, ecc_blocks) = ecc(data, ver, ecl);
    let mut res = interleave(&data_blocks);
    res.extend(interleave(&ecc_blocks));

    debug_assert!(
        res.len() == ver.total_codewords(),
        "Codeword count doesn't match version: Count {}, Version {ver}",
        res.len()
    );
    debug!(
        blocks = data_blocks.len(),
        ec_per_block = ecc_blocks.first().map_or(0, |b| b.len()),
        codewords = res.len(),
        "Computed error correction"
    );

    res
}

// ECC: Error Correction Codeword generator
pub fn ecc(data: &[u8], ver: Version, ecl: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
    let data_blocks = blockify(data, ver, ecl);

    let gen_poly = generator_polynomial(ver.ec_layout(ecl).ec_per_block);
    let ecc_blocks = data_blocks.iter().map(|b| encode_block(b, &gen_poly)).collect::<Vec<_>>();

    (data_blocks, ecc_blocks)
}

pub fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<&[u8]> {
    let layout = ver.ec_layout(ecl);
    let total_g1_size = layout.g1_size * layout.g1_blocks;

    assert_eq!(
        layout.total,
        data.len(),
        "Data len doesn't match total size of blocks: Version {ver}, Ec level {ecl:?}"
    );

    let mut data_blocks = Vec::with_capacity(layout.block_count());
    data_blocks.extend(data[..total_g1_size].chunks(layout.g1_size));
    if layout.g2_blocks > 0 {
        data_blocks.extend(data[total_g1_size..].chunks(layout.g2_size));
    }
    data_blocks
}

// Product of (x - α^i) for i in 0..ec_count, highest degree first
pub fn generator_polynomial(ec_count: usize) -> Vec<G> {
    let mut poly = Vec::with_capacity(ec_count + 1);
    poly.push(G::ONE);
    for i in 0..ec_count {
        let root = G::gen_pow(i);
        poly.push(G::ZERO);
        for j in (1..poly.len()).rev() {
            let prev = poly[j - 1];
            poly[j] += prev * root;
        }
    }
    poly
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn encode_block(block: &[u8], gen_poly: &[G]) -> Vec<u8> {
    let len = block.len();
    let ec_count = gen_poly.len() - 1;

    let mut res = block.iter().map(|&b| G(b)).collect::<Vec<_>>();
    res.resize(len + ec_count, G::ZERO);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == G::ZERO {
            continue;
        }
        for (u, &v) in res[i + 1..].iter_mut().zip(gen_poly[1..].iter()) {
            *u += v * lead_coeff;
        }
    }

    res[len..].iter().map(|&g| g.into()).collect()
}

// Reads blocks column-wise, skipping shorter blocks once they run out
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}
