//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use unpremul::argb_to_rgba_inplace;

    let mut pixels = 0x8040_2010u32.to_ne_bytes().to_vec();
    argb_to_rgba_inplace(&mut pixels).unwrap();
    assert_eq!(pixels, [127, 63, 31, 128]);
}

#[test]
fn readme_strided() {
    use unpremul::argb_to_rgba_inplace_strided;

    let mut buf = vec![0u8; 256 * 100];
    argb_to_rgba_inplace_strided(&mut buf, 60, 100, 256).unwrap();
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use rgb::Rgba;
    use unpremul::typed_rgb;

    let mut pixels: Vec<u32> = vec![0xFF0A141E; 100];
    let rgba: &mut [Rgba<u8>] = typed_rgb::argb_to_rgba_mut(&mut pixels);
    assert_eq!(rgba[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use rgb::Rgba;
    use unpremul::imgref;

    let img = ImgVec::new(vec![0xFF0A141Eu32; 4], 2, 2);
    let rgba: ImgVec<Rgba<u8>> = imgref::unpremultiply(img);
    assert_eq!(rgba.buf()[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
}
