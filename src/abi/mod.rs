pub use uniswap_v2_factory::IUniswapV2Factory;
pub use uniswap_v2_pair::IUniswapV2Pair;

mod uniswap_v2_factory;
mod uniswap_v2_pair;
