//! Published sect571 curve parameters (SEC 2, version 2.0, section 3.7)
//!
//! Both curves have the form y² + xy = x³ + a·x² + b over GF(2^571). The
//! base points are independent test vectors for field multiplication and
//! squaring: they satisfy the curve equation only if the arithmetic is exact.

use binfield_algorithms::FieldElement;

/// Parameters of a binary Weierstrass curve, field values as big-endian hex
#[derive(Debug, Clone, Copy)]
pub struct BinaryCurveVector {
    /// SEC 2 curve name
    pub name: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Base point x-coordinate
    pub gx: &'static str,
    /// Base point y-coordinate
    pub gy: &'static str,
}

/// Koblitz curve sect571k1: a = 0, b = 1
pub const SECT571K1: BinaryCurveVector = BinaryCurveVector {
    name: "sect571k1",
    a: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    b: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
    gx: "026eb7a859923fbc82189631f8103fe4ac9ca2970012d5d46024804801841ca44370958493b205e647da304db4ceb08cbbd1ba39494776fb988b47174dca88c7e2945283a01c8972",
    gy: "0349dc807f4fbf374f4aeade3bca95314dd58cec9f307a54ffc61efc006d8a2c9d4979c0ac44aea74fbebbb9f772aedcb620b01a7ba7af1b320430c8591984f601cd4c143ef1c7a3",
};

/// Random curve sect571r1: a = 1
pub const SECT571R1: BinaryCurveVector = BinaryCurveVector {
    name: "sect571r1",
    a: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
    b: "02f40e7e2221f295de297117b7f3d62f5c6a97ffcb8ceff1cd6ba8ce4a9a18ad84ffabbd8efa59332be7ad6756a66e294afd185a78ff12aa520e4de739baca0c7ffeff7f2955727a",
    gx: "0303001d34b856296c16c0d40d3cd7750a93d1d2955fa80aa5f40fc8db7b2abdbde53950f4c0d293cdd711a35b67fb1499ae60038614f1394abfa3b4c850d927e1e7769c8eec2d19",
    gy: "037bf27342da639b6dccfffeb73d69d78c6c27a6009cbbca1980f8533921e8a684423e43bab08a576291af8f461bb2a8b3531d2f0485c19b16e2f1516e23dd3c1a4827af1b8ac15b",
};

/// Decode a 72-byte big-endian hex string into a field element
pub fn field_element(hex_str: &str) -> FieldElement {
    let bytes = hex::decode(hex_str).expect("vector is valid hex");
    let bytes: [u8; 72] = bytes.try_into().expect("vector is 72 bytes");
    FieldElement::from_bytes(&bytes).expect("vector is below 2^571")
}
