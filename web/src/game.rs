use crate::utils::*;
use lightsout_core as game;
use game::BoardGenerator;
use yew::prelude::*;

/// One running puzzle: the engine plus the number of clicks that changed it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::BoardEngine,
    pub seed: u64,
    pub click_count: u32,
}

impl GameSession {
    fn new(engine: game::BoardEngine, seed: u64) -> Self {
        Self {
            engine,
            seed,
            click_count: 0,
        }
    }

    fn start(config: game::BoardConfig, seed: u64) -> game::Result<Self> {
        let engine = game::RandomBoardGenerator::new(seed).generate(config)?;
        Ok(Self::new(engine, seed))
    }

    fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    fn is_lit(&self, coords: game::Coord2) -> bool {
        self.engine.snapshot()[coords]
    }

    /// Forwards a click to the engine, returning whether the board needs a re-render.
    fn click(&mut self, coords: game::Coord2) -> bool {
        match self.engine.click(coords) {
            Ok(outcome) => {
                if outcome.has_update() {
                    self.click_count = self.click_count.saturating_add(1);
                }
                if outcome == game::ClickOutcome::Won {
                    log::info!("solved seed {:#x} in {} clicks", self.seed, self.click_count);
                }
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("rejected click at {:?}: {}", coords, err);
                false
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Click(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    lit: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        callback,
    } = props.clone();

    let class = classes!("cell", lit.then_some("lit"));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        callback.emit((row, col));
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BoardProps {
    session: GameSession,
    on_click: Callback<game::Coord2>,
}

/// The cell table while playing, the win banner once solved.
#[function_component(BoardView)]
fn board_component(props: &BoardProps) -> Html {
    let BoardProps { session, on_click } = props;

    if session.is_won() {
        return html! {
            <h1>{"You Won!"}</h1>
        };
    }

    let (rows, cols) = session.engine.size();
    html! {
        <table class="board">
            {
                for (0..rows).map(|row| html! {
                    <tr>
                        {
                            for (0..cols).map(|col| {
                                let lit = session.is_lit((row, col));
                                let callback = on_click.clone();
                                html! {
                                    <CellView {row} {col} {lit} {callback}/>
                                }
                            })
                        }
                    </tr>
                })
            }
        </table>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::BoardConfig,
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: game::BoardConfig,
    session: Option<GameSession>,
}

impl GameView {
    fn start_session(config: game::BoardConfig, seed: u64) -> Option<GameSession> {
        GameSession::start(config, seed)
            .inspect(|session| {
                log::debug!(
                    "new game, seed: {:#x}, lit: {}",
                    seed,
                    session.engine.lit_count()
                )
            })
            .inspect_err(|err| log::error!("could not start game: {}", err))
            .ok()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);

        Self {
            config,
            session: Self::start_session(config, seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Click(coords) => {
                log::debug!("click cell: {:?}", coords);
                self.session
                    .as_mut()
                    .is_some_and(|session| session.click(coords))
            }
            NewGame => {
                self.session = Self::start_session(self.config, js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });

        let Some(session) = &self.session else {
            return html! {
                <div class="lightsout">
                    <p class="error">{"Could not start a game with these settings"}</p>
                </div>
            };
        };

        let clicks = format!("{} clicks", session.click_count);
        let on_click = ctx.link().callback(Click);

        html! {
            <div class="lightsout">
                <nav>
                    <aside>{clicks}</aside>
                    <span><button class="new-game" onclick={cb_new_game}>{"New game"}</button></span>
                </nav>
                <BoardView session={session.clone()} {on_click}/>
            </div>
        }
    }
}
