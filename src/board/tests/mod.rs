mod make_move;
mod perft;
