use rand::Rng;

use super::action::Direction;
use super::geometry::Cell;

/// Length above which a snake is able to run into its own body
const SELF_COLLISION_MIN_LEN: usize = 4;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    pub positions: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Direction to switch to on the next tick
    pub next_direction: Option<Direction>,
    /// Cell vacated by the most recent step, kept for erasing on render
    pub last: Option<Cell>,
}

impl Snake {
    /// A length-1 snake at the board center, heading right
    pub fn new() -> Self {
        Self {
            positions: vec![Cell::center()],
            direction: Direction::Right,
            next_direction: None,
            last: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.positions[1..]
    }

    /// Check if a cell collides with the snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (never true for a live snake)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Queue a direction for the next tick.
    ///
    /// No reversal check happens here; the input router only calls this
    /// with directions that are not opposite to [`Snake::direction`].
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Switch to the queued direction, if any
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Move one cell forward, wrapping around the board.
    ///
    /// Returns true if the new head landed on the body and the snake was
    /// reset. Snakes of length 4 or less never collide with themselves.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let new_head = self.head().stepped(self.direction);
        self.positions.insert(0, new_head);
        self.last = self.positions.pop();

        if self.len() > SELF_COLLISION_MIN_LEN && self.collides_with_body(new_head) {
            self.reset(rng);
            return true;
        }

        false
    }

    /// Grow by one cell after the head reached `apple`.
    ///
    /// The cell given up by the preceding [`Snake::advance`] is taken back as
    /// the new tail, so a length-1 snake ends up holding both the apple cell
    /// and its pre-move head.
    pub fn feed(&mut self, apple: Cell) {
        if self.head() == apple {
            if let Some(vacated) = self.last.take() {
                self.positions.push(vacated);
                return;
            }
        }
        self.positions.insert(0, apple);
    }

    /// Back to a single cell at the center, facing a random direction
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.positions = vec![Cell::center()];
        self.direction = Direction::random(rng);
        self.next_direction = None;
        self.last = None;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

/// The apple the snake chases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            position: Cell::random(rng),
        }
    }

    /// Move to a uniformly random cell. The snake's cells are not excluded.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = Cell::random(rng);
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
}

impl GameState {
    pub fn new(snake: Snake, apple: Apple) -> Self {
        Self { snake, apple }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::{GRID_HEIGHT, GRID_WIDTH};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn snake_from(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake {
            positions: cells.iter().map(|&(c, r)| Cell::at(c, r)).collect(),
            direction,
            next_direction: None,
            last: None,
        }
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::center());
        assert_eq!(snake.direction, Direction::Right);
        assert!(snake.next_direction.is_none());
    }

    #[test]
    fn test_pending_direction_applies_once() {
        let mut snake = Snake::new();
        snake.set_pending_direction(Direction::Up);
        assert_eq!(snake.direction, Direction::Right);

        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Up);
        assert!(snake.next_direction.is_none());

        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_pending_direction_last_write_wins() {
        let mut snake = Snake::new();
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = snake_from(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let collided = snake.advance(&mut rng());

        assert!(!collided);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::at(6, 5));
        assert_eq!(snake.positions, vec![Cell::at(6, 5), Cell::at(5, 5), Cell::at(4, 5)]);
        assert_eq!(snake.last, Some(Cell::at(3, 5)));
    }

    #[test]
    fn test_advance_wraps_at_right_edge() {
        let mut snake = snake_from(&[(GRID_WIDTH - 1, 3)], Direction::Right);
        snake.advance(&mut rng());
        assert_eq!(snake.head(), Cell::at(0, 3));
    }

    #[test]
    fn test_advance_wraps_at_top_edge() {
        let mut snake = snake_from(&[(8, 0), (8, 1)], Direction::Up);
        snake.advance(&mut rng());
        assert_eq!(snake.head(), Cell::at(8, GRID_HEIGHT - 1));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_self_collision_resets_long_snake() {
        // Head at (5,5) heading up, body curls around so (5,4) is occupied
        let mut snake = snake_from(
            &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Direction::Up,
        );
        snake.set_pending_direction(Direction::Left);
        let collided = snake.advance(&mut rng());

        assert!(collided);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::center());
        assert!(snake.last.is_none());
        assert!(snake.next_direction.is_none());
        assert!(Direction::ALL.contains(&snake.direction));
    }

    #[test]
    fn test_short_snake_never_self_collides() {
        // Length 4 chasing its own tail around a square
        let mut snake = snake_from(&[(5, 5), (6, 5), (6, 4), (5, 4)], Direction::Up);
        let collided = snake.advance(&mut rng());

        assert!(!collided);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::at(5, 4));
    }

    #[test]
    fn test_overlap_at_length_four_is_not_a_collision() {
        let mut snake = snake_from(&[(5, 5), (5, 4), (6, 4), (7, 4)], Direction::Up);
        let collided = snake.advance(&mut rng());

        assert!(!collided);
        assert_eq!(snake.len(), 4);
        assert!(snake.collides_with_body(snake.head()));
    }

    #[test]
    fn test_feed_grows_by_one() {
        let mut snake = snake_from(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        snake.advance(&mut rng());
        let apple = Cell::at(6, 5);

        snake.feed(apple);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), apple);
        assert_eq!(snake.positions.last(), Some(&Cell::at(3, 5)));
    }

    #[test]
    fn test_feed_from_length_one() {
        let mut snake = Snake::new();
        let start = snake.head();
        snake.advance(&mut rng());
        let apple = snake.head();

        snake.feed(apple);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.positions, vec![apple, start]);
    }

    #[test]
    fn test_apple_relocates_in_bounds() {
        let mut rng = rng();
        let mut apple = Apple::new(&mut rng);
        for _ in 0..100 {
            apple.relocate(&mut rng);
            assert!((0..GRID_WIDTH).contains(&apple.position.column()));
            assert!((0..GRID_HEIGHT).contains(&apple.position.row()));
        }
    }
}
