//! Example: Import and inspect an OBJ file.
//!
//! Run with: cargo run --example import_obj -- assets/cube.obj

use std::env;

use m2j_core::import::import_obj;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: import_obj <path-to-obj-file>");
        return;
    }

    let path = &args[1];
    println!("Importing OBJ file: {}", path);

    match import_obj(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Meshes: {}", scene.mesh_count());
            println!("Materials: {}", scene.material_count());
            println!("Total triangles: {}", scene.total_triangle_count());

            println!("\n--- Meshes ---");
            for (i, mesh) in scene.meshes.iter().enumerate() {
                println!(
                    "  [{}] {} vertices, {} triangles, material {}",
                    i,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    mesh.material_index
                );
                let bounds = mesh.bounds();
                println!(
                    "       Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                    bounds.min.x, bounds.min.y, bounds.min.z,
                    bounds.max.x, bounds.max.y, bounds.max.z
                );
                println!("       Has normals: {}", mesh.has_normals());
                println!("       Has texcoords: {}", mesh.has_uvs());
            }

            println!("\n--- Materials ---");
            for (i, material) in scene.materials.iter().enumerate() {
                println!("  [{}] {:?}", i, material.name);
                if let Some(texture) = &material.diffuse_texture {
                    println!("       Texture: {}", texture);
                }
                if let Some(diffuse) = material.diffuse {
                    println!("       Diffuse: {:?}", diffuse);
                }
            }
        }
        Err(e) => {
            eprintln!("Error importing OBJ file: {}", e);
        }
    }
}
