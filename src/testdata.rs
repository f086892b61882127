//! RSA fixtures shared by the unit tests.
//!
//! Keys use the `SEQUENCE { modulus, exponent }` layout. The known-answer
//! signatures over `b"hello world"` were produced by OpenSSL with PKCS#1 v1.5
//! padding.

pub const PUBLIC_1024: &str = "30818902818100c94330bcce9d8e4217bbe855f705080c989a1497dd2c8b115fb7c85b14e9924ba80c87c9d3daafb40992d662760b7160acce62eea3dcd3d7057ee99363a1d0e4c1664c4b40dfcca5715d725c46f6d5bb1989ddc43bf32ca725f9d0e47d28a1822a5a28b10ebb12c83d0ee095dca99d85e37c9525519c749f1c2eca696d7320b50203010001";

pub const PRIVATE_1024: &str = "3082010702818100c94330bcce9d8e4217bbe855f705080c989a1497dd2c8b115fb7c85b14e9924ba80c87c9d3daafb40992d662760b7160acce62eea3dcd3d7057ee99363a1d0e4c1664c4b40dfcca5715d725c46f6d5bb1989ddc43bf32ca725f9d0e47d28a1822a5a28b10ebb12c83d0ee095dca99d85e37c9525519c749f1c2eca696d7320b502818059b402d3045c20fdc04a56418a79c99ea39d79343eb60dbdcea5c13d2752fb8b90f914c496125061b42aa836f65a1f4c7179038b4da9ad19972f7bb7df9e4dd5fc7b5f6d95bef4387c8faf9c326744bb5d1a9ba8bc553cdf46fd09630c44766067fa68ee88dee9699f9ee3b8bf8481337d3c3747aaded6d5325c4eebcd017039";

pub const PUBLIC_512: &str = "3048024100d081aa76f95c20a0c287f06b1291c75b2da91c021609fd8aabb8c95eb97e60215ea81b75e16febec85d9f1aa534229e8d133bfc6aae541634fa534336b5280c50203010001";

pub const PRIVATE_512: &str = "308185024100d081aa76f95c20a0c287f06b1291c75b2da91c021609fd8aabb8c95eb97e60215ea81b75e16febec85d9f1aa534229e8d133bfc6aae541634fa534336b5280c5024060e631cb72dd8ec8473f97ca9ae9a6c547f6146f1fc0ead49c339759ef48bcf14de31b68e74e4280d04f3d5e19a38f7600f428571d82cd00aad1868a23a6630d";

pub const MESSAGE: &[u8] = b"hello world";

pub const SIG_SHA256_1024: &str = "240436cb769fb1fbe32e8862af82f265e6b21805da9f676174928ed240e4f568b6ef94a4fcb825cd423292c18c3308432fddb17f50c8f8c02983d71e0de0a2b7103deca8504e5efd7d583c4ecd9121578d6912c368078288e3e2a2c3ac1578a3a340a049d1ba3749f3d5215790df73716ef429ec16b49b144644aaa05157033e";

pub const SIG_SHA1_1024: &str = "38b12b251e4da6090dbe7825b9380f23ec2ebc6e6c9d1aa6b9baf17879068bae3f1780dc2bff86259505548306593129582f2a35035273331d3f089373417f05bf2d7730aaeb30444b0688a88a83c997f6495e4c38ee622da881d155c1a11e81b451254fda176ddd50612af8091c46cf6f5f9f543d39df8c614d67f0ec06effb";

pub fn public_1024() -> Vec<u8> {
    hex::decode(PUBLIC_1024).unwrap()
}

pub fn private_1024() -> Vec<u8> {
    hex::decode(PRIVATE_1024).unwrap()
}

pub fn public_512() -> Vec<u8> {
    hex::decode(PUBLIC_512).unwrap()
}

pub fn private_512() -> Vec<u8> {
    hex::decode(PRIVATE_512).unwrap()
}
