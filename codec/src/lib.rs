use surface_types::{ElementDescriptor, LaneWidth, Lanes, MAX_LANES, SurfaceElement};

/// Largest packed element: four 64-bit lanes
pub const MAX_ELEMENT_BYTES: usize = MAX_LANES * 8;

/// Split a typed value into its flat lanes, in x, y, z, w order.
///
/// Signed sub-32-bit lanes are sign-extended into their slot, matching the
/// value-in-register convention; unsigned and float lanes are zero-extended
/// bit patterns. Pure and total for every registered element type.
pub fn decompose<T: SurfaceElement>(value: T) -> Lanes {
    let desc = T::DESC;
    debug_assert_eq!(size_of::<T>(), desc.bytes_per_element());

    let bytes = bytemuck::bytes_of(&value);
    let mut lanes = Lanes::zeroed(desc.lane_count);
    let w = desc.lane_width.bytes();
    for i in 0..desc.lane_count.as_usize() {
        lanes.vals[i] = widen(&bytes[i * w..(i + 1) * w], desc);
    }
    lanes
}

/// Rebuild a typed value from its lanes.
///
/// Each slot is truncated to the lane width (low bits) and reinterpreted per
/// the descriptor. This reproduces the hardware widen-then-narrow behavior
/// bit-for-bit: however a sub-32-bit lane was extended in flight, narrowing
/// keeps only the low bits, and signed reinterpretation falls out of the
/// two's-complement representation.
pub fn recompose<T: SurfaceElement>(lanes: Lanes) -> T {
    let desc = T::DESC;
    debug_assert_eq!(lanes.count, desc.lane_count);

    let mut bytes = [0u8; MAX_ELEMENT_BYTES];
    let w = desc.lane_width.bytes();
    for i in 0..desc.lane_count.as_usize() {
        narrow(lanes.vals[i], desc.lane_width, &mut bytes[i * w..(i + 1) * w]);
    }
    // the scratch array carries no alignment guarantee for T
    bytemuck::pod_read_unaligned(&bytes[..size_of::<T>()])
}

/// Storage-side marshal: widen packed element bytes into lanes.
///
/// Zero-extends every lane; the receiving `recompose` only looks at the low
/// bits, so the extension choice is unobservable.
pub fn lanes_from_raw(bytes: &[u8], desc: ElementDescriptor) -> Lanes {
    debug_assert_eq!(bytes.len(), desc.bytes_per_element());

    let mut lanes = Lanes::zeroed(desc.lane_count);
    let w = desc.lane_width.bytes();
    for i in 0..desc.lane_count.as_usize() {
        let chunk = &bytes[i * w..(i + 1) * w];
        lanes.vals[i] = match desc.lane_width {
            LaneWidth::B8 => chunk[0] as u64,
            LaneWidth::B16 => u16::from_ne_bytes([chunk[0], chunk[1]]) as u64,
            LaneWidth::B32 => u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as u64,
            LaneWidth::B64 => u64::from_ne_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
            ]),
        };
    }
    lanes
}

/// Storage-side marshal: narrow lanes into packed element bytes.
pub fn lanes_to_raw(lanes: Lanes, desc: ElementDescriptor, out: &mut [u8]) {
    debug_assert_eq!(lanes.count, desc.lane_count);
    debug_assert_eq!(out.len(), desc.bytes_per_element());

    let w = desc.lane_width.bytes();
    for i in 0..desc.lane_count.as_usize() {
        narrow(lanes.vals[i], desc.lane_width, &mut out[i * w..(i + 1) * w]);
    }
}

fn widen(chunk: &[u8], desc: ElementDescriptor) -> u64 {
    match desc.lane_width {
        LaneWidth::B8 => {
            if desc.signed {
                chunk[0] as i8 as i64 as u64
            } else {
                chunk[0] as u64
            }
        }
        LaneWidth::B16 => {
            let v = u16::from_ne_bytes([chunk[0], chunk[1]]);
            if desc.signed { v as i16 as i64 as u64 } else { v as u64 }
        }
        LaneWidth::B32 => {
            let v = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if desc.signed { v as i32 as i64 as u64 } else { v as u64 }
        }
        LaneWidth::B64 => u64::from_ne_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]),
    }
}

fn narrow(val: u64, width: LaneWidth, out: &mut [u8]) {
    match width {
        LaneWidth::B8 => out[0] = val as u8,
        LaneWidth::B16 => out.copy_from_slice(&(val as u16).to_ne_bytes()),
        LaneWidth::B32 => out.copy_from_slice(&(val as u32).to_ne_bytes()),
        LaneWidth::B64 => out.copy_from_slice(&val.to_ne_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_types::{
        ALL_ELEMENT_DESCRIPTORS, Char2, Float4, Int2, LaneCount, LaneWidth, Longlong2, Short4,
        Uchar4, VectorClass,
    };

    #[test]
    fn roundtrip_i8_exhaustive() {
        for v in i8::MIN..=i8::MAX {
            assert_eq!(recompose::<i8>(decompose(v)), v);
        }
    }

    #[test]
    fn roundtrip_char2_exhaustive() {
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                let v = Char2 { x, y };
                assert_eq!(recompose::<Char2>(decompose(v)), v);
            }
        }
    }

    #[test]
    fn roundtrip_sampled_widths() {
        for &x in &[i16::MIN, -1, 0, 1, 257, i16::MAX] {
            assert_eq!(recompose::<i16>(decompose(x)), x);
        }
        for &x in &[u32::MIN, 1, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(recompose::<u32>(decompose(x)), x);
        }
        for &x in &[i64::MIN, -1, 0, i64::MAX] {
            assert_eq!(recompose::<i64>(decompose(x)), x);
        }
        let v = Int2 { x: -7, y: 1 << 30 };
        assert_eq!(recompose::<Int2>(decompose(v)), v);
        let v = Short4 { x: i16::MIN, y: -1, z: 0, w: i16::MAX };
        assert_eq!(recompose::<Short4>(decompose(v)), v);
        let v = Uchar4 { x: 0, y: 1, z: 254, w: 255 };
        assert_eq!(recompose::<Uchar4>(decompose(v)), v);
        let v = Longlong2 { x: i64::MIN, y: i64::MAX };
        assert_eq!(recompose::<Longlong2>(decompose(v)), v);
    }

    #[test]
    fn roundtrip_float_bit_patterns() {
        // NaN payloads must survive: compare bit patterns, not values
        let v = Float4 {
            x: f32::from_bits(0x7FC0_0001),
            y: -0.0,
            z: f32::INFINITY,
            w: 1.5,
        };
        let back: Float4 = recompose(decompose(v));
        assert_eq!(back.x.to_bits(), v.x.to_bits());
        assert_eq!(back.y.to_bits(), v.y.to_bits());
        assert_eq!(back.z.to_bits(), v.z.to_bits());
        assert_eq!(back.w.to_bits(), v.w.to_bits());
    }

    #[test]
    fn signed_lanes_sign_extend() {
        let lanes = decompose(-1i8);
        assert_eq!(lanes.vals[0], u64::MAX);
        let lanes = decompose(255u8);
        assert_eq!(lanes.vals[0], 0xFF);
    }

    #[test]
    fn narrow_drops_high_bits_with_signed_semantics() {
        // A widened register can carry anything above the lane width;
        // narrowing must only keep the low bits.
        let mut lanes = Lanes::zeroed(LaneCount::One);
        lanes.vals[0] = 0xFFFF_FF80;
        assert_eq!(recompose::<i8>(lanes), -128);
        assert_eq!(recompose::<u8>(lanes), 0x80);

        lanes.vals[0] = 0x0001_8001;
        assert_eq!(recompose::<i16>(lanes), i16::MIN + 1);
        assert_eq!(recompose::<u16>(lanes), 0x8001);
    }

    #[test]
    fn raw_marshal_matches_packed_layout() {
        let v = Int2 { x: 10, y: 20 };
        let lanes = decompose(v);
        let desc = Int2::DESC;

        let mut raw = [0u8; 8];
        lanes_to_raw(lanes, desc, &mut raw);
        assert_eq!(&raw[..4], &10i32.to_ne_bytes());
        assert_eq!(&raw[4..], &20i32.to_ne_bytes());

        let widened = lanes_from_raw(&raw, desc);
        assert_eq!(recompose::<Int2>(widened), v);
    }

    #[test]
    fn registered_descriptors_all_map_to_classes() {
        for desc in ALL_ELEMENT_DESCRIPTORS {
            assert!(desc.is_supported());
            let _ = desc.class();
        }
        // the quad-64-bit class does not exist
        assert!(VectorClass::of(LaneCount::Four, LaneWidth::B64).is_none());
    }
}
