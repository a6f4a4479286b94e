/// Built-in preamble for wrapped scenes: camera, film and sun blocks in
/// the renderer's directive vocabulary. Emitted verbatim ahead of the
/// merged vertex and face sections.
pub const DEFAULT_TEMPLATE: &str = "\
Camera
  Centre 0.0 0.0 -80.0
  Rotation 0.0 0.0 0.0
  Fov 40.0
  Samples 4
End

Film
  Resolution 1080 1920
End

Sun
  Direction -1.0 -1.0 2.0
  Intensity 0.8
End

";
