//! Decompose a binary glTF asset into interactive surfaces.
//!
//! Only geometry and base color factors are read. Node transforms are baked
//! into world space so picking needs no per-surface matrices.

use crate::error::AssetError;
use crate::surface::{InteractiveSurface, MeshGeometry, SurfaceId};
use fnv::FnvHashSet;
use glam::{Mat3, Mat4, Vec2, Vec3};

/// Parse a `.glb` (or self-contained `.gltf`) and return one surface per
/// triangle primitive of the default scene. Ids start at `first_id`.
pub fn surfaces_from_glb(bytes: &[u8], first_id: u32) -> Result<Vec<InteractiveSurface>, AssetError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoScene)?;

    let mut out = Vec::new();
    let mut next_id = Some(first_id);
    let mut visited = FnvHashSet::default();
    let mut stack: Vec<(gltf::Node, Mat4)> = scene.nodes().map(|n| (n, Mat4::IDENTITY)).collect();
    while let Some((node, parent)) = stack.pop() {
        // node graphs must be trees; a second visit means a cycle or a shared child
        if !visited.insert(node.index()) {
            log::warn!("[asset] node {} revisited, skipping", node.index());
            continue;
        }
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        for child in node.children() {
            stack.push((child, world));
        }
        let Some(mesh) = node.mesh() else {
            continue;
        };
        let mesh_name = mesh.name().or(node.name()).unwrap_or("mesh");
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("[asset] skipping {:?} primitive in {}", prim.mode(), mesh_name);
                continue;
            }
            let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                log::warn!("[asset] primitive {} of {} has no positions", prim.index(), mesh_name);
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from(p)))
                .collect();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(idx) => idx.into_u32().collect(),
                None => {
                    let n = positions.len() as u32;
                    (0..n - n % 3).collect()
                }
            };
            let uvs: Option<Vec<Vec2>> = reader
                .read_tex_coords(0)
                .map(|t| t.into_f32().map(Vec2::from).collect());
            let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
            let normals: Vec<Vec3> = reader
                .read_normals()
                .map(|ns| {
                    ns.map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                        .collect()
                })
                .unwrap_or_default();

            let mut geometry = MeshGeometry {
                positions,
                normals,
                uvs,
                indices,
            };
            if geometry.normals.len() != geometry.positions.len() {
                geometry.compute_normals();
            }
            let id = next_id.ok_or(AssetError::IdOverflow(first_id))?;
            next_id = id.checked_add(1);
            let base_color = prim.material().pbr_metallic_roughness().base_color_factor();
            let surface = InteractiveSurface::new(
                SurfaceId(id),
                format!("{}#{}", mesh_name, prim.index()),
                geometry,
            )
            .with_base_color(base_color);
            log::debug!(
                "[asset] {} '{}' triangles={} uv={}",
                surface.id,
                surface.name,
                surface.geometry.triangle_count(),
                surface.has_parameterization()
            );
            out.push(surface);
        }
    }
    Ok(out)
}
