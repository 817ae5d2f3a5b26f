//! Cube Dodge entry point
//!
//! Handles platform-specific wiring and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent};

    use cube_dodge::consts::*;
    use cube_dodge::sim::{GameSession, InputState, Phase};
    use cube_dodge::{FrameLoop, SavedProgress, hud};

    // JS bindings for the three.js scene. The scene, lighting, and renderer
    // are display concerns; the game only pushes transforms and asks for a
    // render.
    #[wasm_bindgen(inline_js = "
        let scene, camera, renderer, playerMesh;
        const obstacleMeshes = [];

        export function init_scene(obstacleCount, playerSize, obstacleSize, cameraZ) {
            scene = new THREE.Scene();
            scene.background = new THREE.Color(0x000000);

            camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
            camera.position.z = cameraZ;

            renderer = new THREE.WebGLRenderer({ antialias: true });
            renderer.setSize(window.innerWidth, window.innerHeight);
            document.getElementById('game-container').appendChild(renderer.domElement);

            scene.add(new THREE.AmbientLight(0xffffff, 0.5));
            const light = new THREE.DirectionalLight(0xffffff, 1);
            light.position.set(5, 5, 5);
            scene.add(light);

            playerMesh = new THREE.Mesh(
                new THREE.BoxGeometry(playerSize, playerSize, playerSize),
                new THREE.MeshPhongMaterial({
                    color: 0x00ff88,
                    emissive: 0x00ff88,
                    emissiveIntensity: 0.5,
                    shininess: 100,
                }));
            scene.add(playerMesh);

            const geometry = new THREE.BoxGeometry(obstacleSize, obstacleSize, obstacleSize);
            const material = new THREE.MeshPhongMaterial({
                color: 0xff0044,
                emissive: 0x330011,
                transparent: true,
                opacity: 0.8,
            });
            for (let i = 0; i < obstacleCount; i++) {
                const mesh = new THREE.Mesh(geometry, material);
                obstacleMeshes.push(mesh);
                scene.add(mesh);
            }
        }

        export function set_player_transform(x, y, z) {
            if (playerMesh) playerMesh.position.set(x, y, z);
        }

        export function set_obstacle_transform(index, x, y, z) {
            const mesh = obstacleMeshes[index];
            if (mesh) mesh.position.set(x, y, z);
        }

        export function set_camera_transform(x, y, z) {
            if (camera) camera.position.set(x, y, z);
        }

        export function render_scene() {
            if (renderer) renderer.render(scene, camera);
        }
    ")]
    extern "C" {
        fn init_scene(obstacle_count: usize, player_size: f32, obstacle_size: f32, camera_z: f32);
        fn set_player_transform(x: f32, y: f32, z: f32);
        fn set_obstacle_transform(index: usize, x: f32, y: f32, z: f32);
        fn set_camera_transform(x: f32, y: f32, z: f32);
        fn render_scene();
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        input: InputState,
        frame_loop: FrameLoop,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                session: GameSession::new(seed),
                input: InputState::new(),
                frame_loop: FrameLoop::new(),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cube Dodge starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        setup_login(game.clone());
        setup_controls(game.clone());
        setup_game_buttons(game.clone());
        setup_auto_pause(game.clone());

        log::info!("Cube Dodge ready, waiting for login (seed: {seed})");
    }

    /// Login button: validate the username, build the world, arm the loop.
    /// The game stays paused until the start button.
    fn setup_login(game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let document = web_sys::window().unwrap().document().unwrap();

            let username = document
                .get_element_by_id("username")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();

            let mut g = game.borrow_mut();
            match g.session.login(&username) {
                Err(e) => {
                    hud::show_login_error(&e.to_string());
                    return;
                }
                // Already logged in: the scene and loop exist, don't rebuild.
                Ok(false) => return,
                Ok(true) => {}
            }

            if let Some(progress) = SavedProgress::load() {
                g.session.score = progress.score;
                g.session.level = progress.level;
            }

            hud::hide("login-modal");
            hud::show("hud");
            hud::update_score_display(&g.session);

            init_scene(OBSTACLE_COUNT, PLAYER_SIZE, OBSTACLE_SIZE, CAMERA_DISTANCE);

            if g.frame_loop.start() {
                drop(g);
                schedule(game.clone());
            }
        });

        if let Some(btn) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("login-btn"))
        {
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        } else {
            log::warn!("missing element #login-btn");
        }
        closure.forget();
    }

    /// Keyboard and mobile touch controls, both writing the same input map
    fn setup_controls(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.key(), true);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.key(), false);
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for control_id in ["move-left", "move-right", "move-up", "move-down"] {
            let Some(element) = document.get_element_by_id(control_id) else {
                log::warn!("missing touch control #{control_id}");
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.set_touch_control(control_id, true);
                });
                let _ = element.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.set_touch_control(control_id, false);
                });
                let _ = element.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_game_buttons(game: Rc<RefCell<Game>>) {
        let on_click = |id: &str, callback: Closure<dyn FnMut(MouseEvent)>| {
            if let Some(btn) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            {
                let _ =
                    btn.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            } else {
                log::warn!("missing element #{id}");
            }
            callback.forget();
        };

        {
            let game = game.clone();
            on_click(
                "start-btn",
                Closure::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.session.start();
                    // Loop is normally armed at login; re-arm covers a stopped one.
                    if g.frame_loop.start() {
                        drop(g);
                        schedule(game.clone());
                    }
                }),
            );
        }

        {
            let game = game.clone();
            on_click(
                "pause-btn",
                Closure::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.session.pause();
                    SavedProgress::from_session(&g.session).save();
                }),
            );
        }

        {
            let game = game.clone();
            on_click(
                "restart-btn",
                Closure::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.session.restart();
                    SavedProgress::clear();
                    hud::update_score_display(&g.session);
                    if g.frame_loop.start() {
                        drop(g);
                        schedule(game.clone());
                    }
                }),
            );
        }

        on_click(
            "settings-btn",
            Closure::new(move |_event: MouseEvent| {
                hud::show("settings-modal");
            }),
        );
    }

    /// Pause (and save) when the tab is hidden; held keys are released so
    /// nothing sticks when focus returns.
    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                g.input.clear();
                if g.session.phase == Phase::Running {
                    g.session.pause();
                    SavedProgress::from_session(&g.session).save();
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn schedule(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display frame: tick the sim, push transforms, render, update HUD,
    /// then re-arm. Pause skips the sim body and render, never the re-arm.
    fn frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game {
                session,
                input,
                frame_loop,
            } = &mut *g;

            frame_loop.frame(session, input);

            if session.phase == Phase::Running {
                let p = session.player.position;
                set_player_transform(p.x, p.y, p.z);
                for (index, obstacle) in session.obstacles.iter().enumerate() {
                    let o = obstacle.body.position;
                    set_obstacle_transform(index, o.x, o.y, o.z);
                }
                let c = session.camera.position;
                set_camera_transform(c.x, c.y, c.z);
                render_scene();
            }

            hud::update_score_display(session);

            if !frame_loop.is_active() {
                return;
            }
        }

        schedule(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cube_dodge::sim::{GameSession, InputState};
    use cube_dodge::{FrameLoop, consts};

    env_logger::init();
    log::info!("Cube Dodge (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 for the playable version");

    let mut session = GameSession::new(0x5EED);
    if let Err(e) = session.login("demo") {
        log::error!("demo login failed: {e}");
        return;
    }
    session.start();

    let mut input = InputState::new();
    input.set_key("ArrowRight", true);

    let mut frame_loop = FrameLoop::new();
    frame_loop.start();
    for _ in 0..600 {
        frame_loop.frame(&mut session, &input);
    }

    log::info!(
        "Headless demo: {} frames, player at ({:.2}, {:.2}), score {}",
        frame_loop.frames(),
        session.player.position.x,
        session.player.position.y,
        session.score,
    );
    assert!(session.player.position.x <= consts::BOUND_X);
    println!("✓ Headless demo finished (score {})", session.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
