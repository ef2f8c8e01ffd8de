//! Panel de administración por terminal
//!
//! Shell interactivo del sistema de monitoreo de buses escolares:
//! login, secciones del panel y pantallas CRUD por recurso, todo
//! contra el API remoto a través del gateway.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use tracing::info;

use monitoreo_escolar::api::ApiGateway;
use monitoreo_escolar::config::EnvironmentConfig;
use monitoreo_escolar::controllers::{
    AuthController, EstadoColeccion, RecursoController, ResumenController,
};
use monitoreo_escolar::models::{
    Colegio, Estudiante, PadreHijoRelacion, Recurso, Rol, Usuario,
};
use monitoreo_escolar::nav::{seccion_activa, SECCIONES};
use monitoreo_escolar::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚌 Monitoreo Escolar - Panel de administración");

    let config = EnvironmentConfig::desde_env();
    let session = Arc::new(SessionStore::cargar(config.ruta_sesion.clone()));
    let gateway = Arc::new(ApiGateway::new(&config, Arc::clone(&session))?);

    println!("{}", "🚌 Monitoreo Escolar · Panel de administración".bright_blue().bold());
    println!("{}", "==============================================".bright_blue());

    loop {
        if session.token().is_none() && !pantalla_login(&gateway).await? {
            println!("{}", "👋 ¡Hasta luego!".bright_green());
            return Ok(());
        }

        // Shell principal; devuelve false para salir del programa.
        if !shell_dashboard(&gateway, &session).await? {
            println!("{}", "👋 ¡Hasta luego!".bright_green());
            return Ok(());
        }
    }
}

// --- entrada por teclado ---

fn leer_linea(prompt: &str) -> Result<String> {
    print!("{}", prompt.bright_yellow());
    io::stdout().flush()?;
    let mut linea = String::new();
    io::stdin().read_line(&mut linea)?;
    Ok(linea.trim_end_matches(['\r', '\n']).to_string())
}

fn confirmar(mensaje: &str) -> bool {
    print!("{} {} ", mensaje.bright_red(), "(s/N):".bright_yellow());
    let _ = io::stdout().flush();
    let mut linea = String::new();
    if io::stdin().read_line(&mut linea).is_err() {
        return false;
    }
    matches!(linea.trim(), "s" | "S" | "si" | "Si" | "SI" | "sí")
}

fn mostrar_error(mensaje: &str) {
    println!("{} {}", "⚠️".bright_red(), mensaje.bright_red());
}

/// Editar un campo de texto requerido: vacío conserva el valor actual.
fn editar_texto(etiqueta: &str, actual: &str) -> Result<String> {
    let entrada = leer_linea(&format!("{} [{}]: ", etiqueta, actual))?;
    Ok(if entrada.trim().is_empty() {
        actual.to_string()
    } else {
        entrada
    })
}

/// Editar un campo de texto opcional: vacío conserva, "-" lo limpia.
fn editar_texto_opcional(etiqueta: &str, actual: &Option<String>) -> Result<Option<String>> {
    let mostrado = actual.as_deref().unwrap_or("—");
    let entrada = leer_linea(&format!("{} [{}] (\"-\" borra): ", etiqueta, mostrado))?;
    match entrada.trim() {
        "" => Ok(actual.clone()),
        "-" => Ok(None),
        otro => Ok(Some(otro.to_string())),
    }
}

/// Editar un numérico opcional: vacío conserva, "-" lo limpia.
fn editar_numero_opcional(etiqueta: &str, actual: &Option<f64>) -> Result<Option<f64>> {
    loop {
        let mostrado = actual.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string());
        let entrada = leer_linea(&format!("{} [{}] (\"-\" borra): ", etiqueta, mostrado))?;
        match entrada.trim() {
            "" => return Ok(*actual),
            "-" => return Ok(None),
            otro => match otro.parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => mostrar_error("Debe ser un valor numérico."),
            },
        }
    }
}

fn editar_activo(actual: bool) -> Result<bool> {
    let mostrado = if actual { "s" } else { "n" };
    let entrada = leer_linea(&format!("Activo (s/n) [{}]: ", mostrado))?;
    Ok(match entrada.trim() {
        "" => actual,
        "s" | "S" | "si" | "Si" | "sí" => true,
        _ => false,
    })
}

// --- login ---

async fn pantalla_login(gateway: &Arc<ApiGateway>) -> Result<bool> {
    let mut auth = AuthController::new(Arc::clone(gateway));

    println!();
    println!("{}", "🔐 INICIAR SESIÓN".bright_cyan().bold());
    println!("{}", "==================".bright_cyan());
    println!("(deja el correo vacío para salir)");

    loop {
        let email = leer_linea("Correo electrónico: ")?;
        if email.trim().is_empty() {
            return Ok(false);
        }
        let password = leer_linea("Contraseña: ")?;

        println!("{}", "Ingresando...".bright_blue());
        if auth.iniciar_sesion(&email, &password).await {
            println!("{}", "✅ Sesión iniciada".bright_green());
            return Ok(true);
        }
        if let Some(error) = auth.error() {
            mostrar_error(error);
        }
    }
}

// --- shell del dashboard ---

/// Devuelve `true` para volver al login (logout) y `false` para salir.
async fn shell_dashboard(gateway: &Arc<ApiGateway>, session: &Arc<SessionStore>) -> Result<bool> {
    let mut ruta_actual = "/dashboard".to_string();

    loop {
        println!();
        println!("{}", "📋 PANEL DE ADMINISTRACIÓN".bright_green().bold());
        println!("{}", "===========================".bright_green());
        println!("Sesión iniciada como: {}", session.nombre_para_mostrar().bright_cyan());
        println!();

        for (i, seccion) in SECCIONES.iter().enumerate() {
            let marcador = if seccion.es_activa(&ruta_actual) { "►" } else { " " };
            println!("{} {}. {}", marcador.bright_green(), i + 1, seccion.etiqueta);
        }
        println!("  6. 🚪 Cerrar sesión");
        println!("  7. Salir");

        let opcion = leer_linea("Selecciona una opción (1-7): ")?;
        match opcion.trim() {
            "1" | "2" | "3" | "4" | "5" => {
                let indice: usize = opcion.trim().parse().unwrap_or(1);
                ruta_actual = SECCIONES[indice - 1].ruta.to_string();
                match seccion_activa(&ruta_actual).map(|s| s.etiqueta) {
                    Some("Resumen") => pantalla_resumen(gateway).await?,
                    Some("Usuarios") => pantalla_usuarios(gateway).await?,
                    Some("Estudiantes") => pantalla_estudiantes(gateway).await?,
                    Some("Colegios") => pantalla_colegios(gateway).await?,
                    Some("Padre") => pantalla_padre_hijo(gateway).await?,
                    _ => {}
                }
            }
            "6" => {
                session.cerrar();
                println!("{}", "Sesión cerrada.".bright_green());
                return Ok(true);
            }
            "7" => return Ok(false),
            _ => mostrar_error("Opción inválida. Intenta de nuevo."),
        }
    }
}

// --- resumen ---

async fn pantalla_resumen(gateway: &Arc<ApiGateway>) -> Result<()> {
    let mut resumen = ResumenController::new(Arc::clone(gateway));
    println!("{}", "Cargando estadísticas...".bright_blue());
    resumen.cargar().await;

    println!();
    println!("{}", "📊 RESUMEN DEL SISTEMA".bright_green().bold());
    if let Some(error) = resumen.error() {
        mostrar_error(error);
    }
    println!("  Usuarios:    {}", resumen.valor(|s| s.total_usuarios).bright_cyan());
    println!("  Colegios:    {}", resumen.valor(|s| s.total_colegios).bright_cyan());
    println!("  Estudiantes: {}", resumen.valor(|s| s.total_estudiantes).bright_cyan());
    println!("  Buses:       {}", resumen.valor(|s| s.total_buses).bright_cyan());
    Ok(())
}

// --- utilitarios de tabla ---

fn etiqueta_estado(activo: bool) -> ColoredString {
    if activo {
        "Activo".bright_green()
    } else {
        "Inactivo".bright_red()
    }
}

fn celda_opcional<T: ToString>(valor: &Option<T>) -> String {
    valor.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Mensaje de estado de la colección: error de carga, o fila de tabla
/// vacía (solo en éxito vacío, nunca en error).
fn estado_coleccion<R: Recurso>(estado: &EstadoColeccion<R>) -> Option<String> {
    match estado {
        EstadoColeccion::Cargando => Some("Cargando...".to_string()),
        EstadoColeccion::Error(mensaje) => Some(format!("⚠️ {}", mensaje)),
        EstadoColeccion::Cargada(registros) if registros.is_empty() => {
            Some(R::mensajes().vacio.to_string())
        }
        EstadoColeccion::Cargada(_) => None,
    }
}

// --- colegios ---

async fn pantalla_colegios(gateway: &Arc<ApiGateway>) -> Result<()> {
    let mut controller = RecursoController::<Colegio>::new(Arc::clone(gateway));
    println!("{}", "Cargando colegios...".bright_blue());
    controller.cargar().await;

    loop {
        println!();
        println!("{}", "🏫 COLEGIOS".bright_green().bold());
        if let Some(mensaje) = estado_coleccion(controller.estado()) {
            println!("{}", mensaje);
        }
        if let Some(colegios) = controller.registros() {
            println!(
                "{:<5} {:<25} {:<25} {:>10} {:>10} {:<9} {}",
                "ID".bold(), "Nombre".bold(), "Dirección".bold(),
                "Lat".bold(), "Lon".bold(), "Estado".bold(), "Fecha alta".bold()
            );
            for c in colegios {
                println!(
                    "{:<5} {:<25} {:<25} {:>10} {:>10} {:<9} {}",
                    c.id,
                    c.nombre,
                    celda_opcional(&c.direccion),
                    celda_opcional(&c.lat),
                    celda_opcional(&c.lon),
                    etiqueta_estado(c.activo),
                    c.created_at.format("%d/%m/%Y"),
                );
            }
        }
        if let Some(error) = controller.error() {
            mostrar_error(error);
        }

        println!();
        println!("1. Crear colegio  2. Editar  3. Eliminar  4. Volver");
        match leer_linea("Opción: ")?.trim() {
            "1" => {
                {
                    let nuevo = controller.nuevo_mut();
                    nuevo.nombre = leer_linea("Nombre: ")?;
                    nuevo.direccion = leer_linea("Dirección (opcional): ")?;
                    nuevo.lat = leer_linea("Latitud (opcional): ")?;
                    nuevo.lon = leer_linea("Longitud (opcional): ")?;
                }
                println!("{}", "Creando...".bright_blue());
                controller.crear().await;
            }
            "2" => {
                if let Ok(id) = leer_linea("ID a editar: ")?.trim().parse::<i64>() {
                    controller.iniciar_edicion(&id);
                    let hay_borrador = {
                        if let Some(borrador) = controller.borrador_mut() {
                            borrador.nombre = editar_texto("Nombre", &borrador.nombre.clone())?;
                            borrador.direccion = editar_texto_opcional("Dirección", &borrador.direccion.clone())?;
                            borrador.lat = editar_numero_opcional("Latitud", &borrador.lat.clone())?;
                            borrador.lon = editar_numero_opcional("Longitud", &borrador.lon.clone())?;
                            borrador.activo = editar_activo(borrador.activo)?;
                            true
                        } else {
                            mostrar_error("No existe un colegio con ese ID.");
                            false
                        }
                    };
                    if hay_borrador {
                        println!("{}", "Guardando...".bright_blue());
                        controller.guardar().await;
                    }
                }
            }
            "3" => {
                if let Ok(id) = leer_linea("ID a eliminar: ")?.trim().parse::<i64>() {
                    controller
                        .eliminar(id, |c| {
                            let acepta = confirmar(&format!("¿Seguro que deseas eliminar el colegio \"{}\"?", c.etiqueta()));
                            if acepta {
                                println!("{}", "Eliminando...".bright_blue());
                            }
                            acepta
                        })
                        .await;
                }
            }
            "4" => return Ok(()),
            _ => mostrar_error("Opción inválida. Intenta de nuevo."),
        }
    }
}

// --- estudiantes ---

async fn pantalla_estudiantes(gateway: &Arc<ApiGateway>) -> Result<()> {
    let mut controller = RecursoController::<Estudiante>::new(Arc::clone(gateway));
    println!("{}", "Cargando estudiantes...".bright_blue());
    controller.cargar().await;

    loop {
        println!();
        println!("{}", "🎒 ESTUDIANTES".bright_green().bold());
        if let Some(mensaje) = estado_coleccion(controller.estado()) {
            println!("{}", mensaje);
        }
        if let Some(estudiantes) = controller.registros() {
            println!(
                "{:<5} {:<8} {:<10} {:<25} {:<12} {:<9}",
                "ID".bold(), "Colegio".bold(), "Código".bold(),
                "Nombre".bold(), "Curso".bold(), "Estado".bold()
            );
            for e in estudiantes {
                println!(
                    "{:<5} {:<8} {:<10} {:<25} {:<12} {:<9}",
                    e.id,
                    e.colegio_id,
                    e.codigo,
                    e.nombre,
                    celda_opcional(&e.curso),
                    etiqueta_estado(e.activo),
                );
            }
        }
        if let Some(error) = controller.error() {
            mostrar_error(error);
        }

        println!();
        println!("1. Crear estudiante  2. Editar  3. Eliminar  4. Volver");
        match leer_linea("Opción: ")?.trim() {
            "1" => {
                {
                    let nuevo = controller.nuevo_mut();
                    nuevo.colegio_id = leer_linea("ID de colegio: ")?;
                    nuevo.codigo = leer_linea("Código: ")?;
                    nuevo.ci = leer_linea("CI (opcional): ")?;
                    nuevo.nombre = leer_linea("Nombre: ")?;
                    nuevo.curso = leer_linea("Curso (opcional): ")?;
                    nuevo.home_lat = leer_linea("Latitud domicilio (opcional): ")?;
                    nuevo.home_lon = leer_linea("Longitud domicilio (opcional): ")?;
                }
                println!("{}", "Creando...".bright_blue());
                controller.crear().await;
            }
            "2" => {
                if let Ok(id) = leer_linea("ID a editar: ")?.trim().parse::<i64>() {
                    controller.iniciar_edicion(&id);
                    let hay_borrador = {
                        if let Some(borrador) = controller.borrador_mut() {
                            borrador.codigo = editar_texto("Código", &borrador.codigo.clone())?;
                            borrador.ci = editar_texto_opcional("CI", &borrador.ci.clone())?;
                            borrador.nombre = editar_texto("Nombre", &borrador.nombre.clone())?;
                            borrador.curso = editar_texto_opcional("Curso", &borrador.curso.clone())?;
                            borrador.home_lat = editar_numero_opcional("Latitud domicilio", &borrador.home_lat.clone())?;
                            borrador.home_lon = editar_numero_opcional("Longitud domicilio", &borrador.home_lon.clone())?;
                            borrador.activo = editar_activo(borrador.activo)?;
                            true
                        } else {
                            mostrar_error("No existe un estudiante con ese ID.");
                            false
                        }
                    };
                    if hay_borrador {
                        println!("{}", "Guardando...".bright_blue());
                        controller.guardar().await;
                    }
                }
            }
            "3" => {
                if let Ok(id) = leer_linea("ID a eliminar: ")?.trim().parse::<i64>() {
                    controller
                        .eliminar(id, |e| {
                            let acepta = confirmar(&format!("¿Seguro que deseas eliminar al estudiante \"{}\"?", e.etiqueta()));
                            if acepta {
                                println!("{}", "Eliminando...".bright_blue());
                            }
                            acepta
                        })
                        .await;
                }
            }
            "4" => return Ok(()),
            _ => mostrar_error("Opción inválida. Intenta de nuevo."),
        }
    }
}

// --- usuarios ---

fn elegir_rol(actual: Rol) -> Result<Rol> {
    println!("Roles disponibles:");
    for (i, rol) in Rol::TODOS.iter().enumerate() {
        println!("  {}. {}", i + 1, rol);
    }
    let entrada = leer_linea(&format!("Rol [{}]: ", actual))?;
    match entrada.trim().parse::<usize>() {
        Ok(n) if (1..=Rol::TODOS.len()).contains(&n) => Ok(Rol::TODOS[n - 1]),
        _ => Ok(actual),
    }
}

async fn pantalla_usuarios(gateway: &Arc<ApiGateway>) -> Result<()> {
    let mut controller = RecursoController::<Usuario>::new(Arc::clone(gateway));
    println!("{}", "Cargando usuarios...".bright_blue());
    controller.cargar().await;

    loop {
        println!();
        println!("{}", "👥 USUARIOS".bright_green().bold());
        if let Some(mensaje) = estado_coleccion(controller.estado()) {
            println!("{}", mensaje);
        }
        if let Some(usuarios) = controller.registros() {
            println!(
                "{:<5} {:<15} {:<28} {:<25} {:<14} {:<9}",
                "ID".bold(), "Rol".bold(), "Email".bold(),
                "Nombre".bold(), "Teléfono".bold(), "Estado".bold()
            );
            for u in usuarios {
                println!(
                    "{:<5} {:<15} {:<28} {:<25} {:<14} {:<9}",
                    u.id,
                    u.rol.como_str(),
                    u.email,
                    u.nombre,
                    celda_opcional(&u.telefono),
                    etiqueta_estado(u.activo),
                );
            }
        }
        if let Some(error) = controller.error() {
            mostrar_error(error);
        }

        println!();
        println!("1. Editar  2. Eliminar  3. Volver");
        match leer_linea("Opción: ")?.trim() {
            "1" => {
                if let Ok(id) = leer_linea("ID a editar: ")?.trim().parse::<i64>() {
                    controller.iniciar_edicion(&id);
                    let hay_borrador = {
                        if let Some(borrador) = controller.borrador_mut() {
                            borrador.nombre = editar_texto("Nombre", &borrador.nombre.clone())?;
                            borrador.email = editar_texto("Email", &borrador.email.clone())?;
                            borrador.telefono = editar_texto_opcional("Teléfono", &borrador.telefono.clone())?;
                            borrador.rol = elegir_rol(borrador.rol)?;
                            borrador.activo = editar_activo(borrador.activo)?;
                            true
                        } else {
                            mostrar_error("No existe un usuario con ese ID.");
                            false
                        }
                    };
                    if hay_borrador {
                        println!("{}", "Guardando...".bright_blue());
                        controller.guardar().await;
                    }
                }
            }
            "2" => {
                if let Ok(id) = leer_linea("ID a eliminar: ")?.trim().parse::<i64>() {
                    controller
                        .eliminar(id, |u| {
                            let acepta = confirmar(&format!("¿Seguro que deseas eliminar al usuario \"{}\"?", u.etiqueta()));
                            if acepta {
                                println!("{}", "Eliminando...".bright_blue());
                            }
                            acepta
                        })
                        .await;
                }
            }
            "3" => return Ok(()),
            _ => mostrar_error("Opción inválida. Intenta de nuevo."),
        }
    }
}

// --- relaciones padre-hijo ---

async fn pantalla_padre_hijo(gateway: &Arc<ApiGateway>) -> Result<()> {
    let mut controller = RecursoController::<PadreHijoRelacion>::new(Arc::clone(gateway));
    println!("{}", "Cargando relaciones padre–hijo...".bright_blue());
    controller.cargar().await;

    loop {
        println!();
        println!("{}", "👨‍👧 RELACIONES PADRE–HIJO".bright_green().bold());
        if let Some(mensaje) = estado_coleccion(controller.estado()) {
            println!("{}", mensaje);
        }
        if let Some(relaciones) = controller.registros() {
            println!(
                "{:<22} {:<28} {:<22} {:<10} {:<20} {}",
                "Padre".bold(), "Email".bold(), "Estudiante".bold(),
                "Código".bold(), "Colegio".bold(), "Vinculado desde".bold()
            );
            for r in relaciones {
                println!(
                    "{:<22} {:<28} {:<22} {:<10} {:<20} {}",
                    format!("#{} {}", r.padre_id, r.padre_nombre),
                    r.padre_email,
                    format!("#{} {}", r.estudiante_id, r.estudiante_nombre),
                    r.estudiante_codigo,
                    celda_opcional(&r.colegio_nombre),
                    r.vinculacion_desde.format("%d/%m/%Y"),
                );
            }
        }
        if let Some(error) = controller.error() {
            mostrar_error(error);
        }

        println!();
        println!("1. Desvincular  2. Volver");
        match leer_linea("Opción: ")?.trim() {
            "1" => {
                let padre = leer_linea("ID del padre: ")?.trim().parse::<i64>();
                let estudiante = leer_linea("ID del estudiante: ")?.trim().parse::<i64>();
                if let (Ok(padre_id), Ok(estudiante_id)) = (padre, estudiante) {
                    controller
                        .eliminar((padre_id, estudiante_id), |r| {
                            let acepta = confirmar(&format!(
                                "¿Seguro que deseas desvincular al padre \"{}\" del estudiante \"{}\"?",
                                r.padre_nombre, r.estudiante_nombre
                            ));
                            if acepta {
                                println!("{}", "Desvinculando...".bright_blue());
                            }
                            acepta
                        })
                        .await;
                } else {
                    mostrar_error("IDs inválidos.");
                }
            }
            "2" => return Ok(()),
            _ => mostrar_error("Opción inválida. Intenta de nuevo."),
        }
    }
}
