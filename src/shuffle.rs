/// Salt-driven, deterministic Fisher-Yates permutation.
///
/// Walks `symbols` from the back, picking each swap partner from the running
/// sum of salt code points instead of random bits. The same salt always
/// produces the same permutation. An empty salt leaves `symbols` untouched.
pub fn consistent_shuffle(symbols: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..symbols.len()).rev() {
        v %= salt.len();
        let asc = u32::from(salt[v]) as usize;
        p += asc;
        let j = (asc + v + p) % i;
        symbols.swap(i, j);
        v += 1;
    }
}
