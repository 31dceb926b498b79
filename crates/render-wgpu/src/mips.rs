use deskscene_assets::PixelFormat;

/// One level of a mip chain, tightly packed RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipLevel {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Levels needed to go from `width` x `height` down to 1x1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// wgpu has no 3-channel 8-bit format, so RGB input gets an opaque alpha.
pub fn expand_to_rgba(pixels: &[u8], format: PixelFormat) -> Vec<u8> {
    match format {
        PixelFormat::Rgba8 => pixels.to_vec(),
        PixelFormat::Rgb8 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
    }
}

/// Halve an RGBA8 image with a 2x2 box filter. Odd edges reuse the last
/// row or column.
pub fn downsample(level: &MipLevel) -> MipLevel {
    let (w, h) = (level.width, level.height);
    let width = (w / 2).max(1);
    let height = (h / 2).max(1);
    let texel = |x: u32, y: u32, c: usize| -> u32 {
        let x = x.min(w - 1);
        let y = y.min(h - 1);
        level.pixels[((y * w + x) * 4) as usize + c] as u32
    };

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = (x * 2, y * 2);
            for c in 0..4 {
                let sum = texel(sx, sy, c)
                    + texel(sx + 1, sy, c)
                    + texel(sx, sy + 1, c)
                    + texel(sx + 1, sy + 1, c);
                pixels.push(((sum + 2) / 4) as u8);
            }
        }
    }
    MipLevel {
        pixels,
        width,
        height,
    }
}

/// Every level below `base`, largest first. `base` itself is not included.
pub fn mip_chain(base: &MipLevel) -> Vec<MipLevel> {
    let count = mip_level_count(base.width, base.height) as usize;
    let mut levels: Vec<MipLevel> = Vec::with_capacity(count.saturating_sub(1));
    for _ in 1..count {
        let next = downsample(levels.last().unwrap_or(base));
        levels.push(next);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> MipLevel {
        MipLevel {
            pixels: rgba.repeat((width * height) as usize),
            width,
            height,
        }
    }

    #[test]
    fn level_counts() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(4, 2), 3);
        assert_eq!(mip_level_count(5, 3), 3);
        assert_eq!(mip_level_count(1024, 512), 11);
        assert_eq!(mip_level_count(0, 0), 1);
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        let rgba = expand_to_rgba(&[1, 2, 3, 4, 5, 6], PixelFormat::Rgb8);
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
        let same = expand_to_rgba(&[1, 2, 3, 4], PixelFormat::Rgba8);
        assert_eq!(same, vec![1, 2, 3, 4]);
    }

    #[test]
    fn box_filter_averages() {
        let level = MipLevel {
            pixels: vec![
                0, 0, 0, 255, 100, 100, 100, 255, //
                200, 200, 200, 255, 100, 100, 100, 255,
            ],
            width: 2,
            height: 2,
        };
        let half = downsample(&level);
        assert_eq!((half.width, half.height), (1, 1));
        assert_eq!(half.pixels, vec![100, 100, 100, 255]);
    }

    #[test]
    fn odd_sizes_clamp() {
        let half = downsample(&solid(3, 1, [10, 20, 30, 40]));
        assert_eq!((half.width, half.height), (1, 1));
        assert_eq!(half.pixels, vec![10, 20, 30, 40]);
    }

    #[test]
    fn chain_ends_at_one_by_one() {
        let chain = mip_chain(&solid(8, 4, [9, 9, 9, 9]));
        let sizes: Vec<(u32, u32)> = chain.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(sizes, vec![(4, 2), (2, 1), (1, 1)]);
        assert!(chain.iter().all(|l| l.pixels.chunks(4).all(|p| p == [9, 9, 9, 9])));
    }
}
