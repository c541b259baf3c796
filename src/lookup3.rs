//! Bob Jenkins' lookup3 hash, seeded and finalized the same way as
//! PostgreSQL's `hash_bytes`, so hash values of stored names line up with
//! the database's own hash indexes on little-endian hosts.
//!
//! Bytes are always loaded little-endian, so results do not depend on the
//! platform or on the alignment of the input.

const SEED: u32 = 0x9e37_79b9;
const SALT: u32 = 3_923_095;

#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

#[inline(always)]
fn finalize(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(14));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(11));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(25));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(16));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(4));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(14));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(24));
}

/// Little-endian load of up to four bytes, zero-padded.
#[inline(always)]
fn load(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (8 * i)))
}

/// Hash an arbitrary byte string to 32 bits.
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    // PostgreSQL takes the length as a C int; longer inputs just wrap
    let init = SEED.wrapping_add(bytes.len() as u32).wrapping_add(SALT);
    let (mut a, mut b, mut c) = (init, init, init);

    let mut blocks = bytes.chunks_exact(12);
    for block in &mut blocks {
        a = a.wrapping_add(load(&block[0..4]));
        b = b.wrapping_add(load(&block[4..8]));
        c = c.wrapping_add(load(&block[8..12]));
        mix(&mut a, &mut b, &mut c);
    }

    // The lowest byte of c is reserved, so the tail's third word starts one
    // byte up
    let tail = blocks.remainder();
    match tail.len() {
        0 => {}
        1..=4 => {
            a = a.wrapping_add(load(tail));
        }
        5..=8 => {
            a = a.wrapping_add(load(&tail[0..4]));
            b = b.wrapping_add(load(&tail[4..]));
        }
        _ => {
            a = a.wrapping_add(load(&tail[0..4]));
            b = b.wrapping_add(load(&tail[4..8]));
            c = c.wrapping_add(load(&tail[8..]) << 8);
        }
    }

    finalize(&mut a, &mut b, &mut c);
    c
}
