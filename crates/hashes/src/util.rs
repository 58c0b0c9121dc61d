#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}
